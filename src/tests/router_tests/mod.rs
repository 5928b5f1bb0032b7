mod export_tests;
mod finder_tests;
