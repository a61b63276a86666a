use async_trait::async_trait;
use lessonbook_core::{errors::BookingResult, models::lesson::Lesson, repository::ScheduleRepository};
use mockall::mock;

// Mock repository for testing
mock! {
    pub ScheduleRepo {}

    #[async_trait]
    impl ScheduleRepository for ScheduleRepo {
        async fn all_lessons(&self) -> BookingResult<Vec<Lesson>>;

        async fn stage(&mut self, lesson: Lesson) -> BookingResult<()>;

        async fn commit(&mut self) -> BookingResult<usize>;

        fn pending_count(&self) -> usize;
    }
}
