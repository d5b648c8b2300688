use serde::{Deserialize, Serialize};

/// Parámetros de paginación (page, size, sort)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pageable {
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
}

impl Pageable {
    pub fn first(size: u32) -> Self {
        Self { page: 0, size, sort: None }
    }

    pub fn with_sort(mut self, sort: Option<String>) -> Self {
        self.sort = sort;
        self
    }

    /// Pares de query string. `sort` se omite si no está definido.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

/// Respuesta de un endpoint paginado.
/// El backend devuelve a veces un array plano y a veces un objeto `Page` de Spring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Page<T> {
    List(Vec<T>),
    Paged {
        content: Vec<T>,
        #[serde(default, rename = "totalElements")]
        total_elements: Option<u64>,
    },
}

impl<T> Page<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Page::List(items) => items,
            Page::Paged { content, .. } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn sort_is_omitted_when_absent() {
        let pairs = Pageable::first(10).query_pairs();
        assert_eq!(pairs, vec![("page", "0".to_string()), ("size", "10".to_string())]);

        let sorted = Pageable::first(5).with_sort(Some("nickName,asc".into())).query_pairs();
        assert_eq!(sorted.last(), Some(&("sort", "nickName,asc".to_string())));
    }

    #[test]
    fn accepts_bare_array_and_spring_page() {
        let bare: Page<User> = serde_json::from_str(r#"[{"id":1,"nickName":"bob","email":"b@c.de"}]"#).unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let paged: Page<User> = serde_json::from_str(
            r#"{"content":[{"id":2,"nickName":"carol","email":"c@d.ef"}],"totalElements":1,"number":0}"#,
        )
        .unwrap();
        let items = paged.into_items();
        assert_eq!(items[0].nick_name, "carol");
    }
}
