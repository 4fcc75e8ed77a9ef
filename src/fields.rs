use core::fmt;

use serde::Serialize;

/// Canonical output fields. Each one is fed by exactly one sheet column label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Description,
    #[serde(rename = "addr")]
    Address,
    Menu,
    Takeaway,
    Delivery,
    Phone,
    OpeningHours,
    CloseDay,
    Payment,
    Website,
    Sns,
    Transportation,
    Category,
    Genre,
    Note,
    Area,
    Diet,
}

impl Field {
    pub const ALL: [Field; 18] = [
        Field::Name,
        Field::Description,
        Field::Address,
        Field::Menu,
        Field::Takeaway,
        Field::Delivery,
        Field::Phone,
        Field::OpeningHours,
        Field::CloseDay,
        Field::Payment,
        Field::Website,
        Field::Sns,
        Field::Transportation,
        Field::Category,
        Field::Genre,
        Field::Note,
        Field::Area,
        Field::Diet,
    ];

    /// Looks up the field fed by a sheet column. Unknown labels have none.
    pub fn from_label(label: &str) -> Option<Self> {
        Some(match label {
            "店名" => Self::Name,
            "店舗概要" => Self::Description,
            "お店の住所" => Self::Address,
            "お弁当・メニュー情報" => Self::Menu,
            "テイクアウト（持ち帰り）に対応してますか？" => Self::Takeaway,
            "デリバリーサービス（出前・配達）に対応してますか？" => Self::Delivery,
            "お店の電話番号" => Self::Phone,
            "営業時間" => Self::OpeningHours,
            "定休日" => Self::CloseDay,
            "支払い方法" => Self::Payment,
            "ホームページ" => Self::Website,
            "SNS・その他リンク" => Self::Sns,
            "アクセス情報" => Self::Transportation,
            "カテゴリ" => Self::Category,
            "ジャンル" => Self::Genre,
            "その他、留意事項" => Self::Note,
            "地域" => Self::Area,
            "ベジタリアン（vegetarian）、ビーガン（vegan）" => Self::Diet,
            _ => return None,
        })
    }

    /// The sheet column label this field is read from.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "店名",
            Self::Description => "店舗概要",
            Self::Address => "お店の住所",
            Self::Menu => "お弁当・メニュー情報",
            Self::Takeaway => "テイクアウト（持ち帰り）に対応してますか？",
            Self::Delivery => "デリバリーサービス（出前・配達）に対応してますか？",
            Self::Phone => "お店の電話番号",
            Self::OpeningHours => "営業時間",
            Self::CloseDay => "定休日",
            Self::Payment => "支払い方法",
            Self::Website => "ホームページ",
            Self::Sns => "SNS・その他リンク",
            Self::Transportation => "アクセス情報",
            Self::Category => "カテゴリ",
            Self::Genre => "ジャンル",
            Self::Note => "その他、留意事項",
            Self::Area => "地域",
            Self::Diet => "ベジタリアン（vegetarian）、ビーガン（vegan）",
        }
    }

    /// Key used in the output document.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Address => "addr",
            Self::Menu => "menu",
            Self::Takeaway => "takeaway",
            Self::Delivery => "delivery",
            Self::Phone => "phone",
            Self::OpeningHours => "opening_hours",
            Self::CloseDay => "close_day",
            Self::Payment => "payment",
            Self::Website => "website",
            Self::Sns => "sns",
            Self::Transportation => "transportation",
            Self::Category => "category",
            Self::Genre => "genre",
            Self::Note => "note",
            Self::Area => "area",
            Self::Diet => "diet",
        }
    }

    pub fn is_address(&self) -> bool {
        *self == Self::Address
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_label(field.label()), Some(field));
        }
    }

    #[test]
    fn serde_name_matches_key() {
        for field in Field::ALL {
            assert_eq!(
                serde_json::to_value(field).unwrap(),
                serde_json::Value::String(field.key().to_string())
            );
        }
    }

    #[test]
    fn unknown_label() {
        assert_eq!(Field::from_label("未使用列"), None);
        // no trimming or normalization
        assert_eq!(Field::from_label(" 店名"), None);
    }
}
