use serde::{Deserialize, Serialize};

/// A reward tier in the campaign catalog. Customers qualify for a
/// prize by purchase amount; the server picks the tier whose
/// `min_price..=max_price` band contains the amount.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub emoji: String,
    pub min_price: i64,
    pub max_price: i64,
}

/// Catalog wrapper used on the wire: the fetch action returns it and
/// the save action posts the whole catalog back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeCatalog {
    pub prizes: Vec<Prize>,
}

/// The catalog shown when the server has no prizes configured yet.
pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize {
            id: 1,
            name: "1 Roll-On".to_string(),
            color: "#28a745".to_string(),
            emoji: "🎁".to_string(),
            min_price: 0,
            max_price: 50_000,
        },
        Prize {
            id: 2,
            name: "1 Wig Stand".to_string(),
            color: "#17a2b8".to_string(),
            emoji: "🎪".to_string(),
            min_price: 50_000,
            max_price: 100_000,
        },
        Prize {
            id: 3,
            name: "Quality Cloth".to_string(),
            color: "#ffc107".to_string(),
            emoji: "👗".to_string(),
            min_price: 100_000,
            max_price: 150_000,
        },
        Prize {
            id: 4,
            name: "Hair Dryer + Hair Kits".to_string(),
            color: "#dc3545".to_string(),
            emoji: "💇".to_string(),
            min_price: 150_000,
            max_price: 300_000,
        },
    ]
}

/// Next id for a newly added prize: one past the highest existing id,
/// starting at 1 for an empty catalog.
pub fn next_prize_id(prizes: &[Prize]) -> u32 {
    prizes.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let prizes = default_prizes();
        assert_eq!(prizes.len(), 4);
        assert_eq!(prizes[1].name, "1 Wig Stand");
        assert_eq!(prizes[1].color, "#17a2b8");
        assert_eq!(prizes[3].name, "Hair Dryer + Hair Kits");
        assert!(prizes.iter().all(|p| p.min_price < p.max_price));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let prize = &default_prizes()[0];
        let json = serde_json::to_string(prize).unwrap();
        assert!(json.contains("\"minPrice\":0"));
        assert!(json.contains("\"maxPrice\":50000"));
    }

    #[test]
    fn test_next_prize_id() {
        assert_eq!(next_prize_id(&[]), 1);
        assert_eq!(next_prize_id(&default_prizes()), 5);

        let mut sparse = default_prizes();
        sparse.remove(1);
        sparse.remove(1);
        assert_eq!(next_prize_id(&sparse), 5);
    }
}
