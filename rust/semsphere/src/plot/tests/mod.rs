mod axis_view_tests;
