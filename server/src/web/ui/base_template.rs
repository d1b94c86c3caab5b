use crate::web::ui::Resources;
use actix_web::error::UrlGenerationError;
use actix_web::HttpRequest;
use std::fmt::Write;

/// Common template data for all ui templates extending the `base.html` template
///
/// This struct must be a part of the template data structure, as the field `base`.
/// The contained data and functions can be used by the individual template's code, as well.
#[derive(Debug)]
pub struct BaseTemplateContext<'a> {
    /// The HTTP request the template is used to respond to. Used for creating ressource urls and
    /// highlighting the current page in the navigation bar
    pub request: &'a HttpRequest,
    /// HTML title
    pub page_title: &'a str,
    /// The part of the application the page belongs to. Determines the navigation bar.
    pub area: NavArea,
}

impl BaseTemplateContext<'_> {
    pub fn url_for_static(&self, file: &str) -> Result<String, UrlGenerationError> {
        let mut url = self.request.url_for("static_resources", [file])?;
        url.query_pairs_mut().append_pair(
            "hash",
            &Resources::get(file)
                .map(|f| bytes_to_hex(&f.metadata.sha256_hash()))
                .unwrap_or("unknown".to_string()),
        );
        Ok(url.to_string())
    }

    /// Links of the navigation bar of the current page's area
    pub fn nav_links(&self) -> Vec<NavLink> {
        let current_path = self.request.path();
        self.area
            .pages()
            .iter()
            .map(|&(label, path)| NavLink {
                label,
                path,
                active: path == current_path,
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavArea {
    Customer,
    Management,
    Employee,
}

impl NavArea {
    /// Guess the area from a request path, for pages which don't belong to a specific area (e.g.
    /// error pages)
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/employee") {
            NavArea::Employee
        } else if path.starts_with("/management")
            || path.starts_with("/staff_roster")
            || path.starts_with("/card_management")
        {
            NavArea::Management
        } else {
            NavArea::Customer
        }
    }

    fn pages(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            NavArea::Customer => &[
                ("Home", "/"),
                ("Guest Rooms", "/guest_rooms"),
                ("Meeting Spaces", "/meeting_spaces"),
                ("Book", "/book"),
                ("My Reservations", "/my_reservations"),
                ("Account", "/account"),
                ("Profile", "/profile"),
            ],
            NavArea::Management => &[
                ("Login", "/management"),
                ("Staff Roster", "/staff_roster"),
                ("Card Management", "/card_management"),
            ],
            NavArea::Employee => &[
                ("Login", "/employee"),
                ("Rooms", "/employee/rooms"),
                ("Room List", "/employee/room_list"),
                ("Reservations", "/employee/reservations"),
                ("Customer Cards", "/employee/customer_cards"),
                ("Revenue", "/employee/revenue"),
                ("Never Reserved", "/employee/rooms_never_reserved"),
            ],
        }
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::new(), |mut output, b| {
        let _ = write!(output, "{:02x}", b);
        output
    })
}
