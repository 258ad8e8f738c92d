//! Use case implementations.

mod schedule_image_cache_use_case;
mod warm_image_cache_use_case;

pub use schedule_image_cache_use_case::ScheduleImageCacheUseCase;
pub use warm_image_cache_use_case::WarmImageCacheUseCase;
