//! Fixed catalogs used to build synthetic hotels.

/// City whose catalog is used when the requested city has none.
pub const DEFAULT_CITY: &str = "Hà Nội";

/// Hotel names and street addresses for one city.
#[derive(Debug)]
pub struct CityCatalog {
    pub city: &'static str,
    pub hotel_names: [&'static str; 5],
    pub addresses: [&'static str; 5],
}

pub static CITIES: [CityCatalog; 4] = [
    CityCatalog {
        city: "Hà Nội",
        hotel_names: [
            "Hanoi Grand Plaza Hotel",
            "Capital View Hotel",
            "Old Quarter Heritage Hotel",
            "Thang Long Hotel",
            "Dragon Palace Hotel",
        ],
        addresses: [
            "123 Đường Lý Thái Tổ, Hoàn Kiếm, Hà Nội",
            "456 Phố Hàng Bông, Hoàn Kiếm, Hà Nội",
            "789 Đường Trần Hưng Đạo, Hoàn Kiếm, Hà Nội",
            "321 Đường Nguyễn Du, Hai Bà Trưng, Hà Nội",
            "654 Đường Bà Triệu, Hai Bà Trưng, Hà Nội",
        ],
    },
    CityCatalog {
        city: "Đà Nẵng",
        hotel_names: [
            "Danang Beach Resort",
            "Marble Mountains Hotel",
            "Son Tra Peninsula Hotel",
            "My Khe Beach Hotel",
            "Hai Van Pass View Hotel",
        ],
        addresses: [
            "123 Đường Võ Nguyên Giáp, Sơn Trà, Đà Nẵng",
            "456 Đường Phạm Văn Đồng, Hải Châu, Đà Nẵng",
            "789 Đường Nguyễn Tất Thành, Hải Châu, Đà Nẵng",
            "321 Đường Trần Phú, Hải Châu, Đà Nẵng",
            "654 Đường Hoàng Sa, Sơn Trà, Đà Nẵng",
        ],
    },
    CityCatalog {
        city: "Hồ Chí Minh",
        hotel_names: [
            "Saigon Central Hotel",
            "Ben Thanh Plaza Hotel",
            "War Remnants Hotel",
            "Cu Chi Tunnels Resort",
            "Mekong Delta View Hotel",
        ],
        addresses: [
            "123 Đường Nguyễn Huệ, Quận 1, Hồ Chí Minh",
            "456 Đường Đồng Khởi, Quận 1, Hồ Chí Minh",
            "789 Đường Lê Lợi, Quận 1, Hồ Chí Minh",
            "321 Đường Phạm Ngũ Lão, Quận 1, Hồ Chí Minh",
            "654 Đường Bùi Viện, Quận 1, Hồ Chí Minh",
        ],
    },
    CityCatalog {
        city: "Hà Tĩnh",
        hotel_names: [
            "Nghe Tinh Beach Hotel",
            "Hong Linh Mountain Resort",
            "Thien Cam Cave Hotel",
            "Ky Anh Coastal Hotel",
            "Son La Valley Hotel",
        ],
        addresses: [
            "123 Đường Trần Phú, Thành phố Hà Tĩnh",
            "456 Đường Nguyễn Du, Huyện Kỳ Anh",
            "789 Đường Lê Lợi, Huyện Cẩm Xuyên",
            "321 Đường Hồ Chí Minh, Huyện Nghi Xuân",
            "654 Đường Bà Triệu, Huyện Lộc Hà",
        ],
    },
];

pub const PHONE_NUMBERS: [&str; 5] = [
    "0987654321",
    "0978123456",
    "0965432187",
    "0956789123",
    "0943219876",
];

pub const EMAILS: [&str; 5] = [
    "info@hotel.com",
    "reservation@hotel.com",
    "contact@hotel.com",
    "booking@hotel.com",
    "welcome@hotel.com",
];

pub const ROOM_TYPES: [&str; 4] = ["Giường đơn", "Giường đôi", "Phòng cao cấp", "Phòng gia đình"];

/// Bed category and the exclusive upper bound of its random count.
pub const BED_CATEGORIES: [(&str, u32); 5] = [
    ("Giường đơn", 3),
    ("Giường đôi nhỏ", 2),
    ("Giường đôi lớn vừa", 2),
    ("Giường cỡ lớn", 2),
    ("Giường siêu lớn", 2),
];

/// Bathroom category, minimum count and number of possible extra units.
pub const BATHROOM_CATEGORIES: [(&str, u32, u32); 4] = [
    ("Tiêu chuẩn", 1, 2),
    ("Nâng cao", 0, 2),
    ("Cao cấp", 0, 2),
    ("Hạng sang", 0, 2),
];

pub const AMENITIES: [&str; 5] = [
    "Free WiFi",
    "Free Breakfast",
    "Room Service",
    "Mountain View",
    "Pool Access",
];

/// Catalog for `city`, or the default city's when it has none.
pub fn city_catalog(city: &str) -> &'static CityCatalog {
    CITIES
        .iter()
        .find(|catalog| catalog.city == city)
        .unwrap_or(&CITIES[0])
}

/// Description tone for a generated hotel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HotelStyle {
    #[default]
    Modern,
    Traditional,
    Luxury,
    Budget,
}

impl HotelStyle {
    /// Parse a style label; anything unknown is `Modern`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "traditional" => HotelStyle::Traditional,
            "luxury" => HotelStyle::Luxury,
            "budget" => HotelStyle::Budget,
            _ => HotelStyle::Modern,
        }
    }

    pub fn describe(self, hotel_name: &str) -> String {
        match self {
            HotelStyle::Modern => format!(
                "{hotel_name} là khách sạn hiện đại với thiết kế sang trọng, tiện nghi đầy đủ. \
                 Khách sạn nằm ở vị trí thuận tiện, dễ dàng di chuyển đến các điểm tham quan nổi tiếng."
            ),
            HotelStyle::Traditional => format!(
                "{hotel_name} mang đậm nét kiến trúc truyền thống Việt Nam kết hợp với tiện nghi hiện đại. \
                 Khách sạn tạo không gian yên bình, gần gũi với thiên nhiên."
            ),
            HotelStyle::Luxury => format!(
                "{hotel_name} là biểu tượng của sự sang trọng và đẳng cấp. \
                 Với dịch vụ 5 sao, spa cao cấp, nhà hàng fine dining, khách sạn mang đến trải nghiệm lưu trú đỉnh cao."
            ),
            HotelStyle::Budget => format!(
                "{hotel_name} cung cấp dịch vụ lưu trú chất lượng với giá cả phải chăng. \
                 Khách sạn sạch sẽ, an toàn, phù hợp cho du khách muốn tiết kiệm chi phí."
            ),
        }
    }
}
