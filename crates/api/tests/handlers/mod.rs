mod health_test;
mod lesson_test;
mod reference_test;
