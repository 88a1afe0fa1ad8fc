pub mod contains_any;
pub mod count_frequencies;
pub mod sort_results;

pub use contains_any::contains_any;
pub use count_frequencies::most_common;
pub use sort_results::sort_results;
