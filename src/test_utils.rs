mod reducer_tester;

pub use reducer_tester::*;
