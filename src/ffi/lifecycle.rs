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

use std::slice;

use libc::{c_char, c_int};
use log::{debug, info};

use super::{c_str_lossy, write_handle};
use crate::config;
use crate::consts::NT_SUCCESS;
use crate::types::{
    NtConfigStream_t, NtInfoStream_t, NtNetStreamRx_t, NtStatStream_t, NT_STATUS,
};
use crate::utils::guard::{ffi_guard, ffi_guard_or};
use crate::utils::logger;

pub const BUILD_REVISION: &str = env!("NTAPI_STUB_REVISION");
pub const BUILD_DATE: &str = env!("NTAPI_STUB_COMMIT_DATE");

/// Loads the configuration and starts logging; the requested API version is
/// accepted whatever it is.
#[no_mangle]
pub extern "C" fn NT_Init(version: c_int) -> NT_STATUS {
    ffi_guard! {
        let config = config::global();
        logger::start(config);
        info!(
            "ntapi stand-in {} ({}) initialized, requested api version {:#010x}, config {:?}",
            BUILD_REVISION, BUILD_DATE, version, config
        );
        NT_SUCCESS
    }
}

#[no_mangle]
pub extern "C" fn NT_Done() -> NT_STATUS {
    ffi_guard! {
        debug!("NT_Done");
        logger::flush();
        NT_SUCCESS
    }
}

/// Writes `Napatech stub error <status>` with snprintf truncation rules.
/// Returns the number of bytes written before the terminator.
pub(crate) fn explain_into(status: NT_STATUS, dst: &mut [u8]) -> usize {
    let Some(max) = dst.len().checked_sub(1) else {
        return 0;
    };
    let text = format!("Napatech stub error {}", status);
    let n = text.len().min(max);
    dst[..n].copy_from_slice(&text.as_bytes()[..n]);
    dst[n] = 0;
    n
}

#[no_mangle]
pub unsafe extern "C" fn NT_ExplainError(status: NT_STATUS, buf: *mut c_char, size: c_int) {
    if buf.is_null() || size <= 0 {
        return;
    }
    let dst = slice::from_raw_parts_mut(buf as *mut u8, size as usize);
    ffi_guard_or! {
        (),
        explain_into(status, dst);
    }
}

#[no_mangle]
pub unsafe extern "C" fn NT_NetRxOpen(
    h_stream: *mut NtNetStreamRx_t,
    name: *const c_char,
    net_intf: c_int,
    stream_id: c_int,
    hba: c_int,
) -> NT_STATUS {
    ffi_guard! {
        debug!(
            "NT_NetRxOpen name={} interface={} stream_id={} hba={}",
            c_str_lossy(name),
            net_intf,
            stream_id,
            hba
        );
        write_handle(h_stream);
        NT_SUCCESS
    }
}

#[no_mangle]
pub extern "C" fn NT_NetRxClose(_h_stream: NtNetStreamRx_t) -> NT_STATUS {
    debug!("NT_NetRxClose");
    NT_SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn NT_InfoOpen(
    h_stream: *mut NtInfoStream_t,
    name: *const c_char,
) -> NT_STATUS {
    ffi_guard! {
        debug!("NT_InfoOpen name={}", c_str_lossy(name));
        write_handle(h_stream);
        NT_SUCCESS
    }
}

#[no_mangle]
pub extern "C" fn NT_InfoClose(_h_stream: NtInfoStream_t) -> NT_STATUS {
    debug!("NT_InfoClose");
    NT_SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn NT_StatOpen(
    h_stream: *mut NtStatStream_t,
    name: *const c_char,
) -> NT_STATUS {
    ffi_guard! {
        debug!("NT_StatOpen name={}", c_str_lossy(name));
        write_handle(h_stream);
        NT_SUCCESS
    }
}

#[no_mangle]
pub extern "C" fn NT_StatClose(_h_stream: NtStatStream_t) -> NT_STATUS {
    debug!("NT_StatClose");
    NT_SUCCESS
}

#[no_mangle]
pub unsafe extern "C" fn NT_ConfigOpen(
    h_stream: *mut NtConfigStream_t,
    name: *const c_char,
) -> NT_STATUS {
    ffi_guard! {
        debug!("NT_ConfigOpen name={}", c_str_lossy(name));
        write_handle(h_stream);
        NT_SUCCESS
    }
}

#[no_mangle]
pub extern "C" fn NT_ConfigClose(_h_stream: NtConfigStream_t) -> NT_STATUS {
    debug!("NT_ConfigClose");
    NT_SUCCESS
}
