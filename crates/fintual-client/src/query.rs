//! Query string encoding for list filters
//!
//! Each parameter struct declares its own field-to-key mapping through
//! [`QueryParams`]. Fields that are `None` or empty never reach the URL.

/// Declarative mapping from a parameter struct to query keys
pub trait QueryParams {
  /// Every field as `(query key, value)`, in a stable order
  fn fields(&self) -> Vec<(&'static str, Option<&str>)>;
}

/// Encode optional parameters into query pairs, dropping absent and empty values.
///
/// `None` yields no pairs at all, so the request carries no query string.
pub fn encode_query<P>(params: Option<&P>) -> Vec<(String, String)>
where
  P: QueryParams + ?Sized,
{
  let Some(params) = params else {
    return Vec::new();
  };

  params
    .fields()
    .into_iter()
    .filter_map(|(key, value)| match value {
      Some(v) if !v.is_empty() => Some((key.to_string(), v.to_string())),
      _ => None,
    })
    .collect()
}

/// Optional filters for `GET /banks`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankListParams {
  /// Filter banks by name (`q`)
  pub query: Option<String>,
}

impl BankListParams {
  /// Filter by a name fragment
  pub fn query(query: impl Into<String>) -> Self {
    Self { query: Some(query.into()) }
  }
}

impl QueryParams for BankListParams {
  fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
    vec![("q", self.query.as_deref())]
  }
}

/// Optional filters for the conceptual asset listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptualAssetListParams {
  /// Filter by fund name (`name`)
  pub name: Option<String>,

  /// Filter by registration number (`run`)
  pub run: Option<String>,
}

impl ConceptualAssetListParams {
  /// Set the name filter
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Set the RUN filter
  pub fn run(mut self, run: impl Into<String>) -> Self {
    self.run = Some(run.into());
    self
  }
}

impl QueryParams for ConceptualAssetListParams {
  fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
    vec![("name", self.name.as_deref()), ("run", self.run.as_deref())]
  }
}
