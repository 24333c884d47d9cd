mod ignore_regions_test;
mod lint_context_test;
