use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};

mod session;
