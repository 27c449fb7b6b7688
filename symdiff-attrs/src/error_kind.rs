use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Ident,
    MetaNameValue,
    Result,
    Token,
};

/// The expressions given to the `error` attribute, one per tag.
#[derive(Default)]
struct ErrorTags {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorTags {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut tags = Self::default();
        for tag in Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)? {
            let slot = if tag.path.is_ident("message") {
                &mut tags.message
            } else if tag.path.is_ident("labels") {
                &mut tags.labels
            } else if tag.path.is_ident("help") {
                &mut tags.help
            } else {
                return Err(syn::Error::new_spanned(tag.path, "expected `message`, `labels` or `help`"));
            };

            if slot.replace(tag.value).is_some() {
                return Err(syn::Error::new_spanned(tag.path, "tag given more than once"));
            }
        }
        Ok(tags)
    }
}

/// A struct deriving [`ErrorKind`], along with the contents of its `error` attribute.
#[derive(Debug)]
pub struct ErrorKindTarget {
    name: Ident,
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<DeriveInput>()?;
        if !matches!(item.data, Data::Struct(_)) {
            return Err(syn::Error::new_spanned(&item.ident, "`ErrorKind` can only be derived for structs"));
        }

        let attr = item.attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(&item.ident, "missing `error` attribute"))?;
        let tags = attr.parse_args::<ErrorTags>()?;
        let message = tags.message
            .ok_or_else(|| syn::Error::new_spanned(attr, "missing `message` tag"))?;

        Ok(Self {
            name: item.ident,
            message,
            labels: tags.labels,
            help: tags.help,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let Self { name, message, labels, help } = self;
        let labels = match labels {
            Some(labels) => quote! { #labels },
            None => quote! { std::iter::empty::<&str>() },
        };
        let help = help.as_ref().map(|help| quote! { .with_help(#help) });

        tokens.extend(quote! {
            impl ErrorKind for #name {
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                fn message(&self) -> String {
                    (#message).to_string()
                }

                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[std::ops::Range<usize>],
                ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                    let labels = (#labels).into_iter()
                        .zip(spans)
                        .map(|(text, span)| {
                            let text = text.to_string();
                            let label = ariadne::Label::new((src_id, span.clone()))
                                .with_color(symdiff_error::EXPR);
                            if text.is_empty() {
                                label
                            } else {
                                label.with_message(text)
                            }
                        });

                    let offset = spans.first().map_or(0, |span| span.start);
                    ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                        .with_message(self.message())
                        .with_labels(labels)
                        #help
                        .finish()
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use super::*;

    fn parse(tokens: TokenStream2) -> Result<ErrorKindTarget> {
        syn::parse2(tokens)
    }

    #[test]
    fn all_tags() {
        let target = parse(quote! {
            #[error(message = "bad", labels = ["here"], help = "fix it",)]
            struct Bad { found: char }
        }).unwrap();
        assert_eq!(target.name, "Bad");
        assert!(target.labels.is_some());
        assert!(target.help.is_some());
        assert!(target.to_token_stream().to_string().contains("impl ErrorKind for Bad"));
    }

    #[test]
    fn message_is_required() {
        assert!(parse(quote! { struct Bad; }).is_err());
        assert!(parse(quote! { #[error(help = "fix it")] struct Bad; }).is_err());
    }

    #[test]
    fn rejects_bad_tags() {
        assert!(parse(quote! { #[error(message = "a", note = "b")] struct Bad; }).is_err());
        assert!(parse(quote! { #[error(message = "a", message = "b")] struct Bad; }).is_err());
        assert!(parse(quote! { #[error(message = "a")] enum Bad { A } }).is_err());
    }
}
