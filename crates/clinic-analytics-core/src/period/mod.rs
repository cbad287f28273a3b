pub mod resolver;

pub use resolver::{
    calculate_date_range, calculate_date_range_at, previous_date_range, Period,
};
