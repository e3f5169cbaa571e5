//! User records and the directory that holds them.
//!
//! Records mirror the JSON served by the directory endpoint. Fields the
//! endpoint sends beyond these (address, geo, catch phrase, ...) are ignored
//! on deserialisation.

use serde::{Deserialize, Serialize};

/// The employer attached to a [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
  pub name: String,
}

/// One entry of the directory. Never mutated once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
  pub id:       u64,
  pub name:     String,
  pub username: String,
  pub email:    String,
  pub phone:    String,
  pub website:  String,
  pub company:  Company,
}

impl UserRecord {
  /// `mailto:` link for the record's email address.
  pub fn mailto_href(&self) -> String { format!("mailto:{}", self.email) }

  /// `tel:` link with spaces, dashes and parentheses removed.
  ///
  /// Extensions such as `x5442` are kept as-is.
  pub fn tel_href(&self) -> String {
    let digits: String = self
      .phone
      .chars()
      .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
      .collect();
    format!("tel:{digits}")
  }

  /// The website as an `https://` URL.
  pub fn website_href(&self) -> String { format!("https://{}", self.website) }
}

/// The ordered, immutable collection produced by one successful fetch.
///
/// Order is exactly the order the records arrived in. There are no mutating
/// methods; a new fetch would produce a new `Directory`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
  users: Vec<UserRecord>,
}

impl Directory {
  pub fn len(&self) -> usize { self.users.len() }

  pub fn is_empty(&self) -> bool { self.users.is_empty() }

  pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> { self.users.iter() }

  pub fn as_slice(&self) -> &[UserRecord] { &self.users }
}

impl From<Vec<UserRecord>> for Directory {
  fn from(users: Vec<UserRecord>) -> Self { Self { users } }
}

impl<'a> IntoIterator for &'a Directory {
  type Item = &'a UserRecord;
  type IntoIter = std::slice::Iter<'a, UserRecord>;

  fn into_iter(self) -> Self::IntoIter { self.users.iter() }
}

/// Two-record directory shared by the crate's tests.
#[cfg(test)]
pub(crate) fn fixture() -> Directory {
  serde_json::from_str(
    r#"[
      {
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": { "street": "Kulas Light", "city": "Gwenborough" },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered" }
      },
      {
        "id": 2,
        "name": "Ervin Howell",
        "username": "Antonette",
        "email": "Shanna@melissa.tv",
        "phone": "010-692-6593 x09125",
        "website": "anastasia.net",
        "company": { "name": "Deckow-Crist" }
      }
    ]"#,
  )
  .expect("fixture parses")
}
