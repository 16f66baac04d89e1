//! Data-field decoration for composite templates.
//!
//! [`DataFieldDecorator`] runs once per `@DataField` member during the scan
//! phase and deposits a [`Statement`](trellis_codegen::Statement) and a type
//! for the member into the [`DataFieldRecord`] of its declaring type. Once the
//! scan is finished, [`aggregate_data_fields`] merges the records along a
//! component's ancestor chain into one [`AggregateView`] for the emitter.

pub mod aggregate;
pub mod config;
pub mod data_field;
pub mod decorator;
pub mod error;
pub mod record;

pub use aggregate::{AggregateView, aggregate_data_fields};
pub use config::{DataFieldConfig, DuplicatePolicy};
pub use data_field::DataField;
pub use decorator::{DATA_FIELD_NAMESPACE, DataFieldDecorator};
pub use error::{AggregateError, ConfigError, DecorateError};
pub use record::{DataFieldRecord, InsertOutcome};
