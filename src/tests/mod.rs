//! Cross-module tests exercising the whole pipeline.

mod evaluator_tests;
