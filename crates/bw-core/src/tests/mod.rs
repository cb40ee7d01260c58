mod aggregator_tests;
mod classifier_tests;
mod service_tests;
mod support;
