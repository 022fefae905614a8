use mockall::mock;
use tripsync_core::models::ordering::ReorderEntry;
use tripsync_core::models::tour::ItineraryDay;
use uuid::Uuid;

use crate::models::{DbAdmin, DbCity, DbContactSubmission, DbReview, DbTour};

// Mock repositories for testing
mock! {
    pub CityRepo {
        pub async fn create_city(
            &self,
            title: &'static str,
            description: &'static str,
            image: &'static str,
        ) -> eyre::Result<DbCity>;

        pub async fn get_all_cities(&self) -> eyre::Result<Vec<DbCity>>;

        pub async fn get_city_by_id(&self, id: Uuid) -> eyre::Result<Option<DbCity>>;

        pub async fn update_city(
            &self,
            id: Uuid,
            title: Option<&'static str>,
            description: Option<&'static str>,
            image: Option<&'static str>,
        ) -> eyre::Result<Option<DbCity>>;

        pub async fn delete_city(&self, id: Uuid) -> eyre::Result<Option<DbCity>>;

        pub async fn reorder_cities(&self, entries: Vec<ReorderEntry>) -> eyre::Result<()>;
    }
}

mock! {
    pub TourRepo {
        pub async fn create_tour(
            &self,
            city_id: Uuid,
            title: &'static str,
            duration: &'static str,
            destinations: Vec<String>,
            itinerary: Vec<ItineraryDay>,
            image: Option<&'static str>,
        ) -> eyre::Result<DbTour>;

        pub async fn get_tour_by_id(&self, id: Uuid) -> eyre::Result<Option<DbTour>>;

        pub async fn get_tours_by_city_id(&self, city_id: Uuid) -> eyre::Result<Vec<DbTour>>;

        pub async fn get_featured_tours(&self) -> eyre::Result<Vec<DbTour>>;

        pub async fn delete_tour(&self, id: Uuid) -> eyre::Result<Option<DbTour>>;

        pub async fn set_featured(&self, id: Uuid, featured: bool) -> eyre::Result<Option<DbTour>>;

        pub async fn reorder_tours(&self, entries: Vec<ReorderEntry>) -> eyre::Result<()>;
    }
}

mock! {
    pub ReviewRepo {
        pub async fn create_review(
            &self,
            customer_name: &'static str,
            rating: i32,
            review: &'static str,
            image: &'static str,
        ) -> eyre::Result<DbReview>;

        pub async fn get_all_reviews(&self) -> eyre::Result<Vec<DbReview>>;

        pub async fn get_active_reviews(&self) -> eyre::Result<Vec<DbReview>>;

        pub async fn get_review_by_id(&self, id: Uuid) -> eyre::Result<Option<DbReview>>;

        pub async fn delete_review(&self, id: Uuid) -> eyre::Result<Option<DbReview>>;

        pub async fn set_review_status(
            &self,
            id: Uuid,
            is_active: bool,
        ) -> eyre::Result<Option<DbReview>>;

        pub async fn reorder_reviews(&self, entries: Vec<ReorderEntry>) -> eyre::Result<()>;
    }
}

mock! {
    pub ContactSubmissionRepo {
        pub async fn create_submission(
            &self,
            form: tripsync_core::models::contact::ContactRequest,
            slot_ist: Option<&'static str>,
            slot_user: Option<&'static str>,
        ) -> eyre::Result<DbContactSubmission>;

        pub async fn list_submissions(
            &self,
            email: Option<&'static str>,
            meeting_date: Option<&'static str>,
            page: i64,
            limit: i64,
        ) -> eyre::Result<Vec<DbContactSubmission>>;

        pub async fn count_submissions(
            &self,
            email: Option<&'static str>,
            meeting_date: Option<&'static str>,
        ) -> eyre::Result<i64>;

        pub async fn get_upcoming_meetings(
            &self,
            today: &'static str,
        ) -> eyre::Result<Vec<(String, String)>>;
    }
}

mock! {
    pub AdminRepo {
        pub async fn create_admin(
            &self,
            email: &'static str,
            password_hash: &'static str,
        ) -> eyre::Result<DbAdmin>;

        pub async fn get_admin_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbAdmin>>;

        pub async fn verify_credentials(
            &self,
            email: &'static str,
            password: &'static str,
        ) -> eyre::Result<Option<DbAdmin>>;
    }
}
