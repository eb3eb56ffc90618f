//! Size query parameter validation.

pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 4096;

/// True if `size` is a power of two in `[16, 4096]`.
pub fn valid_icon_size(size: u32) -> bool {
    size.is_power_of_two() && (MIN_SIZE..=MAX_SIZE).contains(&size)
}
