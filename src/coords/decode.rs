use super::error::DecodeError;
use super::structs::{
    DecimalCoordinate, GPS_LATITUDE, GPS_LATITUDE_REF, GPS_LONGITUDE, GPS_LONGITUDE_REF,
    RawGpsMetadata, Rational, TagValue,
};
use tracing::{debug, warn};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Decodes one image's GPS section into signed decimal degrees.
///
/// All four tags (`GPSLatitude`, `GPSLatitudeRef`, `GPSLongitude`, `GPSLongitudeRef`) must be
/// present and non-empty, otherwise [`DecodeError::MissingCoordinate`] is returned. Latitude is
/// negated unless its reference is exactly `"N"`, longitude unless it is exactly `"E"`, so an
/// unrecognised reference always lands in the southern/western hemisphere.
///
/// # Errors
///
/// * [`DecodeError::MissingCoordinate`]: a required tag is absent or empty.
/// * [`DecodeError::MalformedRational`]: a component has a zero denominator.
/// * [`DecodeError::MalformedTriple`]: the value is not exactly (degrees, minutes, seconds).
/// * [`DecodeError::UnexpectedType`]: a tag holds the wrong kind of value.
/// * [`DecodeError::OutOfRange`]: the decoded magnitude exceeds 90° / 180°.
pub fn try_decode(metadata: &RawGpsMetadata) -> Result<DecimalCoordinate, DecodeError> {
    let latitude_dms = required(metadata, GPS_LATITUDE)?;
    let latitude_ref = required(metadata, GPS_LATITUDE_REF)?;
    let longitude_dms = required(metadata, GPS_LONGITUDE)?;
    let longitude_ref = required(metadata, GPS_LONGITUDE_REF)?;

    let latitude = dms_to_degrees(GPS_LATITUDE, latitude_dms)?;
    let longitude = dms_to_degrees(GPS_LONGITUDE, longitude_dms)?;

    if latitude > MAX_LATITUDE {
        return Err(DecodeError::OutOfRange {
            tag: GPS_LATITUDE,
            value: latitude,
        });
    }
    if longitude > MAX_LONGITUDE {
        return Err(DecodeError::OutOfRange {
            tag: GPS_LONGITUDE,
            value: longitude,
        });
    }

    let latitude_sign = hemisphere_sign(reference(GPS_LATITUDE_REF, latitude_ref)?, "N");
    let longitude_sign = hemisphere_sign(reference(GPS_LONGITUDE_REF, longitude_ref)?, "E");

    Ok(DecimalCoordinate::new(
        latitude * latitude_sign,
        longitude * longitude_sign,
    ))
}

/// Like [`try_decode`], but recovers every failure as "no coordinate".
///
/// Missing tags are logged at `debug`, malformed ones at `warn`, so a single corrupt image
/// never aborts a batch.
pub fn decode(metadata: &RawGpsMetadata) -> Option<DecimalCoordinate> {
    match try_decode(metadata) {
        Ok(coordinate) => Some(coordinate),
        Err(e) if e.is_missing() => {
            debug!("{e}");
            None
        }
        Err(e) => {
            warn!("Skipping malformed GPS metadata: {e}");
            None
        }
    }
}

fn required<'a>(
    metadata: &'a RawGpsMetadata,
    tag: &'static str,
) -> Result<&'a TagValue, DecodeError> {
    metadata
        .get(tag)
        .ok_or(DecodeError::MissingCoordinate(tag))
}

/// degrees + minutes/60 + seconds/3600
fn dms_to_degrees(tag: &'static str, value: &TagValue) -> Result<f64, DecodeError> {
    let TagValue::Rationals(rationals) = value else {
        return Err(DecodeError::UnexpectedType {
            tag,
            expected: "a list of rationals",
        });
    };
    let [degrees, minutes, seconds] = rationals.as_slice() else {
        return Err(DecodeError::MalformedTriple {
            tag,
            found: rationals.len(),
        });
    };

    let component = |index: usize, r: &Rational| {
        r.to_f64()
            .ok_or(DecodeError::MalformedRational { tag, index })
    };

    Ok(component(0, degrees)? + component(1, minutes)? / 60.0 + component(2, seconds)? / 3600.0)
}

fn reference<'a>(tag: &'static str, value: &'a TagValue) -> Result<&'a str, DecodeError> {
    match value {
        TagValue::Text(text) => Ok(text),
        _ => Err(DecodeError::UnexpectedType {
            tag,
            expected: "a hemisphere reference string",
        }),
    }
}

fn hemisphere_sign(reference: &str, positive: &str) -> f64 {
    if reference == positive { 1.0 } else { -1.0 }
}
