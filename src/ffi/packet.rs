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

//! Packet descriptor accessors. The stand-in never hands out a descriptor,
//! so these answer the same fixed values for any argument, null included.

use std::ptr;

use libc::{c_int, c_void};

use crate::consts::NT_TIMESTAMP_TYPE_NATIVE_UNIX;
use crate::types::NtNetBuf_t;

#[no_mangle]
pub extern "C" fn NT_NET_GET_PKT_TIMESTAMP(_net_buf: NtNetBuf_t) -> c_int {
    0
}

#[no_mangle]
pub extern "C" fn NT_NET_GET_PKT_TIMESTAMP_TYPE(_net_buf: NtNetBuf_t) -> c_int {
    NT_TIMESTAMP_TYPE_NATIVE_UNIX
}

#[no_mangle]
pub extern "C" fn NT_NET_GET_PKT_L2_PTR(_net_buf: NtNetBuf_t) -> *mut c_void {
    ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn NT_NET_GET_PKT_WIRE_LENGTH(_net_buf: NtNetBuf_t) -> c_int {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TimestampType;

    #[test]
    fn accessors_are_constant() {
        let mut backing = [0u8; 64];
        for buf in [ptr::null_mut(), backing.as_mut_ptr() as NtNetBuf_t] {
            assert_eq!(NT_NET_GET_PKT_TIMESTAMP(buf), 0);
            assert_eq!(
                TimestampType::try_from(NT_NET_GET_PKT_TIMESTAMP_TYPE(buf)).ok(),
                Some(TimestampType::NativeUnix)
            );
            assert!(NT_NET_GET_PKT_L2_PTR(buf).is_null());
            assert_eq!(NT_NET_GET_PKT_WIRE_LENGTH(buf), 0);
        }
        assert!(backing.iter().all(|b| *b == 0));
    }
}
