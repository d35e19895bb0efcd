//! 변환 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 추후 다른 프런트엔드 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod table;
pub mod ui_cli;
