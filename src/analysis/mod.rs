//! Query functions over cleaned school data

pub mod borough;
pub mod rank;

pub use borough::{BoroughStats, get_borough_stats, get_largest_std_borough};
pub use rank::{MathRanking, TotalRanking, get_best_math_schools, get_top_schools_by_total_sat};
