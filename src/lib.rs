//! RO 시스템 설계 계산 툴박스.
//!
//! 수질 분석과 이온 밸런스, 스테이지별 프로젝션, 스케일 지표,
//! 전/후처리 약품 평가, 단위 변환기를 제공한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod dosing;
pub mod i18n;
pub mod membrane_db;
pub mod project;
pub mod projection;
pub mod quantity;
pub mod ui_cli;
pub mod units;
pub mod water;
