use df_catalog::CatalogError;
use df_leads::TransportError;
use std::borrow::Cow;

#[df_derive::df_error]
pub enum SiteError {
    #[error("Catalog setup failed{}: {source}", format_context(.context))]
    Catalog { source: CatalogError, context: Option<Cow<'static, str>> },

    #[error("Lead form setup failed{}: {source}", format_context(.context))]
    Leads { source: TransportError, context: Option<Cow<'static, str>> },
}
