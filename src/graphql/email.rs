use crate::validation::parser::{EmailParser, ParsedEmail};
use async_graphql::{Context, Object, Result, SimpleObject};

/// GraphQL view of [`ParsedEmail`].
#[derive(SimpleObject, Clone, Debug)]
pub struct ParsedEmailObject {
    pub email: String,
    pub local_part: String,
    pub domain: String,
    pub preferred: String,
    pub normalized: String,
    pub extra: String,
    pub disposable: bool,
}

impl From<ParsedEmail> for ParsedEmailObject {
    fn from(p: ParsedEmail) -> Self {
        Self {
            email: p.email,
            local_part: p.local_part,
            domain: p.domain,
            preferred: p.preferred,
            normalized: p.normalized,
            extra: p.extra,
            disposable: p.disposable,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct ParseError {
    /// Always INVALID_EMAIL.
    pub code: String,
    pub message: String,
}

/// Either `parsed` or `error` is set.
#[derive(SimpleObject, Clone, Debug)]
pub struct ParseEmailResponse {
    pub is_valid: bool,
    pub parsed: Option<ParsedEmailObject>,
    pub error: Option<ParseError>,
}

#[derive(Default)]
pub struct EmailQuery;

#[Object]
impl EmailQuery {
    /// Parses an address. Invalid input is reported in `error`, not as a
    /// GraphQL error.
    async fn parse_email(
        &self,
        ctx: &Context<'_>,
        email: String,
        #[graphql(default = false)] case_sensitive: bool,
    ) -> Result<ParseEmailResponse> {
        let parser = ctx.data::<EmailParser>()?;
        Ok(match parser.parse(&email, case_sensitive) {
            Ok(parsed) => ParseEmailResponse {
                is_valid: true,
                parsed: Some(parsed.into()),
                error: None,
            },
            Err(e) => ParseEmailResponse {
                is_valid: false,
                parsed: None,
                error: Some(ParseError {
                    code: "INVALID_EMAIL".to_string(),
                    message: e.to_string(),
                }),
            },
        })
    }
}
