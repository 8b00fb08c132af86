// Problem: Two Sum
// Difficulty: Easy
// URL: https://leetcode.com/problems/two-sum/

// Time Complexity: O(n)
// Space Complexity: O(n)

use std::collections::HashMap;

pub struct Solution;

impl Solution {
    /// Returns the indices `(i, j)`, `i < j`, of the first pair completed by a
    /// forward scan whose values add up to `target`, or `None` if no two
    /// distinct positions do.
    pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
        let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

        for (i, &num) in nums.iter().enumerate() {
            // i64 so that e.g. target = i32::MIN, num = 1 cannot overflow
            let complement = i64::from(target) - i64::from(num);
            if let Some(&index) = i32::try_from(complement)
                .ok()
                .and_then(|c| seen.get(&c))
            {
                return Some((index, i));
            }
            seen.insert(num, i);
        }

        None
    }

    /// LeetCode signature: `[i, j]`, or an empty vector when there is no pair.
    ///
    /// LeetCode bounds `nums.len()` by 10^4, so both indices fit in `i32`;
    /// a pair whose indices do not fit is reported as not found rather than
    /// truncated.
    pub fn two_sum_indices(nums: Vec<i32>, target: i32) -> Vec<i32> {
        Self::two_sum(&nums, target)
            .and_then(|(i, j)| Some(vec![i32::try_from(i).ok()?, i32::try_from(j).ok()?]))
            .unwrap_or_default()
    }
}
