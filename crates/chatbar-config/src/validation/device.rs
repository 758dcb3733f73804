//! Device threshold validation.

use crate::schema::ChatbarConfig;

use super::helpers::validate_nonzero;

pub(crate) fn validate_device(errors: &mut Vec<String>, config: &ChatbarConfig) {
    validate_nonzero(
        errors,
        "device.mobile_max_width",
        u64::from(config.device.mobile_max_width),
    );
}
