use crate::coords::structs::{
    GPS_LATITUDE, GPS_LATITUDE_REF, GPS_LONGITUDE, GPS_LONGITUDE_REF, RawGpsMetadata, Rational,
    TagValue,
};
use crate::features::error::MetadataError;
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const GPS_TAGS: [(Tag, &str); 4] = [
    (Tag::GPSLatitude, GPS_LATITUDE),
    (Tag::GPSLatitudeRef, GPS_LATITUDE_REF),
    (Tag::GPSLongitude, GPS_LONGITUDE),
    (Tag::GPSLongitudeRef, GPS_LONGITUDE_REF),
];

/// Reads the GPS section of an image's EXIF block.
///
/// An image that simply has no EXIF data yields an empty [`RawGpsMetadata`].
///
/// # Errors
///
/// * [`MetadataError::Io`]: the file cannot be opened.
/// * [`MetadataError::Exif`]: the file has an EXIF block that cannot be parsed.
pub fn read_gps_metadata(path: &Path) -> Result<RawGpsMetadata, MetadataError> {
    let mut reader = BufReader::new(File::open(path)?);
    match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Ok(gps_metadata_from_exif(&exif)),
        Err(exif::Error::NotFound(_)) => Ok(RawGpsMetadata::new()),
        Err(e) => Err(e.into()),
    }
}

/// Copies the four GPS position tags out of a parsed EXIF block, leaving values untouched.
pub fn gps_metadata_from_exif(exif: &Exif) -> RawGpsMetadata {
    let mut metadata = RawGpsMetadata::new();
    for (tag, name) in GPS_TAGS {
        if let Some(field) = exif.get_field(tag, In::PRIMARY) {
            metadata.insert(name, tag_value(&field.value));
        }
    }
    metadata
}

fn tag_value(value: &Value) -> TagValue {
    match value {
        Value::Rational(rationals) => TagValue::Rationals(
            rationals
                .iter()
                .map(|r| Rational::new(r.num, r.denom))
                .collect(),
        ),
        Value::Ascii(strings) => TagValue::Text(
            strings
                .first()
                .map(|s| String::from_utf8_lossy(s).into_owned())
                .unwrap_or_default(),
        ),
        other => TagValue::Other(serde_json::Value::String(format!("{other:?}"))),
    }
}
