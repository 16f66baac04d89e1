//! Generated-code fragments.
//!
//! A [`Statement`] describes how generated code obtains a member's value. It
//! stores only validated strings so it stays `Send + Sync`; tokens are built
//! on demand through [`ToTokens`].

use std::fmt;
use std::str::FromStr;

use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};

use crate::error::CodegenError;

/// A member name that is a valid, non-keyword Rust identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberIdent(String);

impl MemberIdent {
	pub fn new(name: impl Into<String>) -> Result<Self, CodegenError> {
		let name = name.into();
		if name.starts_with("r#") || syn::parse_str::<syn::Ident>(&name).is_err() {
			return Err(CodegenError::InvalidIdent(name));
		}
		Ok(Self(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for MemberIdent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl ToTokens for MemberIdent {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		Ident::new(&self.0, Span::call_site()).to_tokens(tokens);
	}
}

/// Path of a static function, e.g. `ui::ElementWrapperWidget::get_widget`.
///
/// Generic arguments are rejected; the adapter is always a plain call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallPath {
	leading_colon: bool,
	segments: Vec<String>,
}

impl CallPath {
	pub fn parse(input: &str) -> Result<Self, CodegenError> {
		let invalid = |reason: String| CodegenError::InvalidPath {
			path: input.to_string(),
			reason,
		};

		let path: syn::Path = syn::parse_str(input).map_err(|e| invalid(e.to_string()))?;
		let mut segments = Vec::with_capacity(path.segments.len());
		for segment in &path.segments {
			if !matches!(segment.arguments, syn::PathArguments::None) {
				return Err(invalid(format!(
					"segment `{}` has generic arguments",
					segment.ident
				)));
			}
			let ident = segment.ident.to_string();
			if ident.starts_with("r#") {
				return Err(invalid(format!("raw identifier `{ident}` is not supported")));
			}
			segments.push(ident);
		}

		Ok(Self {
			leading_colon: path.leading_colon.is_some(),
			segments,
		})
	}

	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().map(String::as_str)
	}

	/// The final segment: the function being called.
	pub fn function(&self) -> &str {
		self.segments.last().map(String::as_str).unwrap_or_default()
	}
}

impl fmt::Display for CallPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.leading_colon {
			f.write_str("::")?;
		}
		f.write_str(&self.segments.join("::"))
	}
}

impl FromStr for CallPath {
	type Err = CodegenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<String> for CallPath {
	type Error = CodegenError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl From<CallPath> for String {
	fn from(path: CallPath) -> Self {
		path.to_string()
	}
}

impl ToTokens for CallPath {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		if self.leading_colon {
			tokens.extend(quote!(::));
		}
		let segments = self.segments.iter().map(|s| Ident::new(s, Span::call_site()));
		tokens.extend(quote!(#(#segments)::*));
	}
}

/// How generated code obtains a member's value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
	/// Direct field access: `self.name`.
	Field(MemberIdent),
	/// Direct accessor call: `self.name()`.
	Method(MemberIdent),
	/// Static call wrapping other statements: `path(args...)`.
	InvokeStatic {
		path: CallPath,
		args: Vec<Statement>,
	},
}

impl Statement {
	pub fn field(name: MemberIdent) -> Self {
		Self::Field(name)
	}

	pub fn method(name: MemberIdent) -> Self {
		Self::Method(name)
	}

	pub fn invoke_static(path: CallPath, args: Vec<Statement>) -> Self {
		Self::InvokeStatic { path, args }
	}

	/// Wraps `inner` in a single-argument adapter call.
	pub fn adapted(adapter: CallPath, inner: Statement) -> Self {
		Self::invoke_static(adapter, vec![inner])
	}

	/// True for a plain reference to the member itself.
	pub fn is_direct(&self) -> bool {
		matches!(self, Self::Field(_) | Self::Method(_))
	}

	/// The adapter path, if this statement is a static call.
	pub fn adapter(&self) -> Option<&CallPath> {
		match self {
			Self::InvokeStatic { path, .. } => Some(path),
			_ => None,
		}
	}
}

impl ToTokens for Statement {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		match self {
			Self::Field(name) => tokens.extend(quote!(self.#name)),
			Self::Method(name) => tokens.extend(quote!(self.#name())),
			Self::InvokeStatic { path, args } => tokens.extend(quote!(#path(#(#args),*))),
		}
	}
}

impl fmt::Display for Statement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.to_token_stream(), f)
	}
}
