//! Wire types for the FlowBoard API.
//!
//! Field names follow the server's JSON contract (camelCase); durations travel
//! as ISO-8601 strings such as `PT2H30M`.

#![allow(missing_docs)]

mod project;
mod project_user;
mod report;
mod task;
mod time_log;
mod user;

pub use self::project::{
    CompanyDto, ProjectCreateRequest, ProjectDto, ProjectStatus, ProjectType,
    ProjectUpdateRequest, StoryPointTimeMappingDto,
};
pub use self::project_user::{
    ProjectUserCreateRequest, ProjectUserDto, ProjectUserUpdateRequest, UserRole,
};
pub use self::report::{
    CreateCocReportRequest, CreateEmployeeMatrixReportRequest,
    CreateProjectActivityReportRequest, DownloadReportDto, ReportCreateRequest, ReportDto,
    ReportUpdateRequest,
};
pub use self::task::{TaskCreateRequest, TaskDto, TaskStatus, TaskUpdateRequest};
pub use self::time_log::{TimeLogDto, TimeLogRequest};
pub use self::user::{UserCreateRequest, UserDto, UserUpdateRequest};
