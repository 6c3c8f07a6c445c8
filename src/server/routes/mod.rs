mod latest_launch;

pub use latest_launch::latest_launch;
