mod filtered_results;
