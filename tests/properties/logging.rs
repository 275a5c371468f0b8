//! Property-based tests for log file naming.
//!
//! `compute_rolled_file_path` must always produce `<stem>-<date>.<index>.log`,
//! whether or not the base already ends in `.log`.
//!
//!   Refer to `src/logging/mod.rs` for more details.
use cats_api::logging::compute_rolled_file_path;
use proptest::{prelude::*, test_runner::Config};

proptest! {
  #![proptest_config(Config {
    cases: 500, ..Config::default()
  })]

  #[test]
  fn prop_rolled_path_strips_single_log_suffix(
    stem in "[a-zA-Z0-9_/]{1,40}",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..10_000
  ) {
      let base = format!("{}.log", stem);
      let result = compute_rolled_file_path(&base, &date, index);
      prop_assert_eq!(result, format!("{}-{}.{}.log", stem, date, index));
  }

  #[test]
  fn prop_rolled_path_keeps_other_bases_whole(
    base in ".*",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..10_000
  ) {
      prop_assume!(!base.ends_with(".log"));
      let result = compute_rolled_file_path(&base, &date, index);
      prop_assert_eq!(result, format!("{}-{}.{}.log", base, date, index));
  }

  #[test]
  fn prop_rolled_path_always_ends_in_log(
    base in ".*",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..10_000
  ) {
      let result = compute_rolled_file_path(&base, &date, index);
      let expected_suffix = format!(".{}.log", index);
      prop_assert!(result.ends_with(&expected_suffix));
      prop_assert!(result.contains(&date));
  }
}
