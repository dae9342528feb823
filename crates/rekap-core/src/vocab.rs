//! Business vocabulary shared between the cleaner and the aggregator.
//!
//! Column names and channel labels are exact header strings from the daily
//! export and the accumulated DB. Keeping them in one place prevents the
//! normalizer output and the KPI lookup keys from drifting apart.

pub mod columns {
    pub const TANGGAL: &str = "Tanggal";
    pub const TELEPON: &str = "Telepon";
    pub const RAW_TELEPON: &str = "No. Telepon";
    pub const RAW_KOTA: &str = "Kota/Kabupaten";
    pub const KOTA: &str = "KOTA";
    pub const NAMA_TOKO: &str = "Nama toko";
    pub const STATUS_MP: &str = "Status MP";
    pub const PLATFORM: &str = "Platform";
    pub const SKU_INDUK: &str = "SKU Induk";
    pub const JUMLAH_PRODUK: &str = "Jumlah Produk di Pesan";
    pub const JUMLAH: &str = "Jumlah";
    pub const NO_PESANAN: &str = "No. Pesanan";
    pub const TELEPON_PLACEHOLDER: &str = "Telepon_placeholder";
    pub const IS_NC: &str = "is_nc";
    pub const IS_RO: &str = "is_ro";
}

/// Internal test store excluded from every recap. Compared case-insensitively.
pub const EXCLUDED_STORE: &str = "bikinganteng_id";

/// Marketplace status for orders that have not settled yet.
pub const STATUS_PENDING: &str = "Pending";

/// SKUs that make up the basic package bundle.
pub const PAKET_BASIC_SKUS: &[&str] = &["Gamalpackage05"];

/// Stringified missing phone value. Rows carrying it fall back to the order
/// number as their identity key.
pub const MISSING_PHONE: &str = "nan";

/// Canonical sales channels recognized by the platform normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Shopee,
    Tokopedia,
    Tiktok,
    Lazada,
    Website,
    Wa,
    Reseller,
}

impl Platform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shopee => "Shopee",
            Self::Tokopedia => "Tokopedia",
            Self::Tiktok => "Tiktok",
            Self::Lazada => "Lazada",
            Self::Website => "Website",
            Self::Wa => "WA",
            Self::Reseller => "Reseller",
        }
    }
}
