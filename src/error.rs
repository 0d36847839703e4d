/*
 * Copyright (c) 2025 Yunshan Networks
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use num_enum::TryFromPrimitiveError;
use thiserror::Error;

use crate::consts::Status;
use crate::types::NT_STATUS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("timeout")]
    Timeout,
    #[error("try again")]
    TryAgain,
    #[error("unknown status code {0}")]
    UnknownStatus(NT_STATUS),
}

impl Error {
    pub fn status(&self) -> NT_STATUS {
        match self {
            Error::InvalidParameter(_) => Status::InvalidParameter.into(),
            Error::Timeout => Status::Timeout.into(),
            Error::TryAgain => Status::TryAgain.into(),
            Error::UnknownStatus(s) => *s,
        }
    }
}

impl From<TryFromPrimitiveError<Status>> for Error {
    fn from(e: TryFromPrimitiveError<Status>) -> Self {
        Error::UnknownStatus(e.number)
    }
}

/// Maps a status returned by an `NT_*` call to a `Result`.
pub fn check(status: NT_STATUS) -> Result<()> {
    match Status::try_from(status)? {
        Status::Success => Ok(()),
        Status::InvalidParameter => Err(Error::InvalidParameter("rejected by ntapi")),
        Status::Timeout => Err(Error::Timeout),
        Status::TryAgain => Err(Error::TryAgain),
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn check_maps_codes() {
        assert_eq!(check(NT_SUCCESS), Ok(()));
        assert_eq!(check(NT_STATUS_TRYAGAIN), Err(Error::TryAgain));
        assert_eq!(check(NT_STATUS_TIMEOUT), Err(Error::Timeout));
        assert!(matches!(
            check(NT_ERROR_INVALID_PARAMETER),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(check(42), Err(Error::UnknownStatus(42)));
    }

    #[test]
    fn status_round_trips_through_error() {
        for code in [
            NT_ERROR_INVALID_PARAMETER,
            NT_STATUS_TIMEOUT,
            NT_STATUS_TRYAGAIN,
            -100,
        ] {
            assert_eq!(check(code).unwrap_err().status(), code);
        }
    }
}
