mod input_value_coercer_tests;
