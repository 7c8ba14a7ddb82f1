mod catalog_tests;
