// Problem: Contains Duplicate
// Difficulty: Easy
// URL: https://leetcode.com/problems/contains-duplicate/

// Time Complexity: O(n)
// Space Complexity: O(n)

use std::collections::HashSet;

pub struct Solution;

impl Solution {
    /// Given an integer array nums, return true if any value appears
    /// at least twice in the array.
    pub fn contains_duplicate(nums: &[i32]) -> bool {
        Self::first_duplicate(nums).is_some()
    }

    /// Index of the first element whose value was already seen, scanning
    /// left to right.
    pub fn first_duplicate(nums: &[i32]) -> Option<usize> {
        let mut seen = HashSet::with_capacity(nums.len());

        for (i, &num) in nums.iter().enumerate() {
            if !seen.insert(num) {
                return Some(i);
            }
        }

        None
    }
}
