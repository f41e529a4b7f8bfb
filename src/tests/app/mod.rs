mod pager_tests;
