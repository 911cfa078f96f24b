//! Core library for wpmigrate
//!
//! This crate implements the **Functional Core** of the wpmigrate application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The wpmigrate project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`wpmigrate_core`** (this crate): Pure transformation functions with zero I/O
//! - **`wpmigrate`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No filesystem reads, no network calls
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by domain:
//!
//! - [`post`]: The `PostRecord` migration unit, slug and nicename utilities,
//!   and the REST submission payload
//! - [`hugo`]: Field extraction from rendered Hugo pages
//! - [`frontmatter`]: Front-matter splitting and metadata parsing for
//!   Markdown sources
//! - [`dates`]: Publish-date parsing and interchange-format rendering
//! - [`wxr`]: WordPress eXtended RSS (WXR) document rendering
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types for extracted and rendered data
//! - **Transformation functions**: Pure functions from source data to domain models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! The imperative shell walks directories, reads files, and performs network
//! calls; everything between "bytes in" and "bytes out" lives here.

pub mod dates;
pub mod frontmatter;
pub mod hugo;
pub mod post;
pub mod wxr;
