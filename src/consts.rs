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

use libc::c_int;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::NT_STATUS;

// status codes
pub const NT_SUCCESS: NT_STATUS = 0;
pub const NT_ERROR_INVALID_PARAMETER: NT_STATUS = -1;
pub const NT_STATUS_TIMEOUT: NT_STATUS = -2;
pub const NT_STATUS_TRYAGAIN: NT_STATUS = -3;

pub const NTAPI_VERSION: c_int = 0x03000000;
pub const NT_NET_INTERFACE_PACKET: c_int = 1;

// timestamp types
pub const NT_TIMESTAMP_TYPE_NATIVE_UNIX: c_int = 1;
pub const NT_TIMESTAMP_TYPE_PCAP: c_int = 2;
pub const NT_TIMESTAMP_TYPE_PCAP_NANOTIME: c_int = 3;
pub const NT_TIMESTAMP_TYPE_NATIVE_NDIS: c_int = 4;

// command identifiers
pub const NT_NETRX_READ_CMD_STREAM_DROP: c_int = 1;
pub const NT_INFO_CMD_READ_STREAM: c_int = 1;
pub const NT_STATISTICS_READ_CMD_USAGE_DATA_V0: c_int = 1;
pub const NT_STATISTICS_READ_CMD_QUERY_V2: c_int = 2;
pub const NT_NTPL_PARSER_VALIDATE_NORMAL: c_int = 1;

pub const MAX_HOST_BUFFERS: usize = 16;
pub const ERR_BUFFER_COUNT: usize = 3;
pub const ERR_BUFFER_SIZE: usize = 256;

// values reported by the read stubs
pub const STUB_STREAM_COUNT: u32 = 1;
pub const STUB_HOST_BUFFERS_USED: u32 = 1;
pub const STUB_ONBOARD_BUFFER_SIZE: u64 = 1024;
pub const STUB_NTPL_ID: c_int = 1;

#[derive(Debug, PartialEq, Eq, Clone, Copy, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Status {
    Success = 0,
    InvalidParameter = -1,
    Timeout = -2,
    TryAgain = -3,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum TimestampType {
    NativeUnix = 1,
    Pcap = 2,
    PcapNanotime = 3,
    NativeNdis = 4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_code() {
        assert_eq!(Status::try_from(0).unwrap(), Status::Success);
        assert_eq!(Status::try_from(-3).unwrap(), Status::TryAgain);
        assert!(Status::try_from(-4).is_err());
        assert_eq!(i32::from(Status::Timeout), NT_STATUS_TIMEOUT);
    }

    #[test]
    fn timestamp_type_from_code() {
        assert_eq!(
            TimestampType::try_from(NT_TIMESTAMP_TYPE_NATIVE_UNIX).unwrap(),
            TimestampType::NativeUnix
        );
        assert!(TimestampType::try_from(0).is_err());
    }
}
