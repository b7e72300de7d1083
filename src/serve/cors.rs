//! permissive cross-origin headers
use rocket::{
    Request, Response,
    fairing::{Fairing, Info, Kind},
    http::{Header, Status},
    options,
};

/// the headers added to every response
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "*"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
];

/// adds [`CORS_HEADERS`] to every response, errors included
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "permissive CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _req: &'r Request<'_>, res: &mut Response<'r>) {
        for (name, value) in CORS_HEADERS {
            res.set_header(Header::new(name, value));
        }
    }
}

#[options("/<_..>")]
/// answer every preflight request with an empty 200
pub fn preflight() -> Status {
    Status::Ok
}
