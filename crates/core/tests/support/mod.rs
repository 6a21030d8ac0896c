//! Shared test support for core service tests
#![allow(dead_code)]

pub mod repositories;
