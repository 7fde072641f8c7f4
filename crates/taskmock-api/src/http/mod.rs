//! HTTP REST endpoints.
//!
//! Implements the mock backend contract the UI client exercises.
//!
//! # Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/api/v1/lists` | POST | Create list |
//! | `/api/v1/lists/{list_id}` | DELETE | Delete list |
//! | `/api/v1/lists/{list_id}/tasks` | POST | Create task in list |
//! | `/api/v1/tasks/{task_id}` | PATCH | Update task completion |
//! | `/api/v1/tasks/{task_id}` | DELETE | Delete task |
//! | `/health` | GET | Liveness check |

pub mod routes;
pub mod state;

pub use routes::{create_router, create_router_with_body_limit, ApiError, DEFAULT_BODY_LIMIT};
pub use state::AppState;
