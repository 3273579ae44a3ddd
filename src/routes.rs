use crate::app::App;
use crate::errors::AppResult;
use crate::store::{VisitCounter, VISIT_KEY};
use axum::{response::IntoResponse, routing::get, Extension};

/// Assemble the application with its store handle injected. Generic over
/// the counter so tests can swap the store for an in-memory double.
pub fn app<C>(counter: C) -> App
where
    C: VisitCounter + Clone + Send + Sync + 'static,
{
    App::new()
        .route("/", get(welcome))
        .route("/count", get(count::<C>))
        .inject(counter)
}

async fn welcome() -> impl IntoResponse {
    "Welcome"
}

async fn count<C>(Extension(mut counter): Extension<C>) -> AppResult<String>
where
    C: VisitCounter + Clone + Send + Sync + 'static,
{
    let visits = counter.increment(VISIT_KEY).await?;
    Ok(format!("You have visited this site {visits} times."))
}
