use serde::{Deserialize, Deserializer, Serialize};

/// Success envelope shared by every endpoint. Errors use the envelope in
/// `crate::error`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn ok<T: Serialize>(data: T) -> axum::Json<ApiResponse<T>> {
    axum::Json(ApiResponse {
        success: true,
        data,
        message: None,
    })
}

pub fn ok_with_message<T: Serialize>(data: T, message: &str) -> axum::Json<ApiResponse<T>> {
    axum::Json(ApiResponse {
        success: true,
        data,
        message: Some(message.to_string()),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    /// Builds the envelope around an already-sliced page, e.g. rows the
    /// database returned together with a separate count.
    pub fn from_parts(items: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        let total_pages = (total + page_size - 1) / page_size;
        Paginated {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

/// Slices a full in-memory collection into one page. Out-of-range pages
/// yield an empty item list with the unchanged totals.
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: i64) -> Paginated<T> {
    let total = items.len() as i64;
    let start = (page - 1) * page_size;
    let items = if start >= total {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start as usize)
            .take(page_size as usize)
            .collect()
    };
    Paginated::from_parts(items, total, page, page_size)
}

/// `page`/`pageSize` query parameters. Absent or non-numeric values fall
/// back to 1 and 20 instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, rename = "pageSize", deserialize_with = "lenient_i64")]
    pub page_size: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.filter(|p| *p >= 1).unwrap_or(1)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.filter(|p| *p >= 1).unwrap_or(20)
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse::<i64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_requested_page() {
        let page = paginate((1..=8).collect::<Vec<_>>(), 2, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total, 8);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn paginate_out_of_range_page_is_empty_with_totals() {
        let page = paginate((1..=8).collect::<Vec<_>>(), 4, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 8);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn paginate_empty_collection_has_zero_pages() {
        let page = paginate(Vec::<i32>::new(), 1, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn page_query_defaults_when_absent_or_garbage() {
        let q: PageQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), 20);

        let q: PageQuery = serde_urlencoded::from_str("page=abc&pageSize=xyz").unwrap();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), 20);

        let q: PageQuery = serde_urlencoded::from_str("page=0&pageSize=-5").unwrap();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), 20);
    }

    #[test]
    fn page_query_parses_numeric_values() {
        let q: PageQuery = serde_urlencoded::from_str("page=3&pageSize=5").unwrap();
        assert_eq!(q.page(), 3);
        assert_eq!(q.page_size(), 5);
    }
}
