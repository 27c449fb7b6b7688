mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct. The generated `build_report` refers to
/// `ariadne` and `symdiff_error`, so the deriving crate must depend on both.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use symdiff_attrs::ErrorKind;
/// use symdiff_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of monomial", labels = ["add an exponent here"])]
/// pub struct Foo;
///
/// assert_eq!(Foo.message(), "unexpected end of monomial");
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to each span of the error, in order.       |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` and `help` accept an expression that should evaluate to a [`String`] or `&str`;
/// `labels` accepts an expression that can be iterated to produce them. The expressions are
/// evaluated inside methods taking `&self`, so they can refer to fields as `self.field`.
///
/// Labels without a corresponding span are not rendered.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    parse_macro_input!(item as ErrorKindTarget).into_token_stream().into()
}
