//! This module re-exports the `suap_auth` types the rest of the application works with.
//!
//! Consumers of the `domain` crate (the `web` layer) handle tokens, callback parameters and
//! resource clients through these re-exports and never depend on `suap_auth` directly.
pub use suap_auth::{
    AuthorizationRequest, AuthorizationResponse, Client, ResourceClient, TokenBundle,
    TokenSource,
};

pub use academic_period::AcademicPeriod;
pub use gateway::suap::{Enrollment, Period, Profile, ReportCardEntry, StageGrade};

pub mod academic_period;
pub mod authorization;
pub mod error;
pub mod profile;
pub mod report_card;

pub mod gateway;
