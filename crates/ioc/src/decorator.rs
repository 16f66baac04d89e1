//! The member decoration seam.

use trellis_codegen::{Statement, TypeArena};

use crate::context::InjectionContext;
use crate::member::InjectableMember;

/// Invoked once per member carrying [`CodeDecorator::Annotation`].
///
/// Returned statements are spliced into the bean's construction code.
/// Decorators that only collect metadata return an empty list and deposit
/// their results in [`InjectionContext::attributes`].
pub trait CodeDecorator: Send + Sync {
	/// Annotation payload this decorator handles.
	type Annotation;
	type Error;

	fn generate_decorator(
		&self,
		ctx: &InjectionContext,
		types: &TypeArena,
		member: &InjectableMember,
		annotation: &Self::Annotation,
	) -> Result<Vec<Statement>, Self::Error>;
}
