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

//! Safe handles over the exported functions, for Rust consumers that link
//! the stand-in directly instead of going through `nt.h`.

use std::ffi::CString;
use std::ptr;

use libc::{c_int, c_void};
use log::warn;

use crate::consts::TimestampType;
use crate::error::{check, Error, Result};
use crate::ffi::{self, explain_into};
use crate::types::{
    NtConfigStream_t, NtInfoStream_t, NtInfo_t, NtNetBuf_t, NtNetRxCmd_t, NtNetStreamRx_t,
    NtNtplInfo_t, NtStatStream_t, NtStatistics_t, NT_STATUS,
};

const EXPLAIN_BUFFER_SIZE: usize = 128;

pub fn init(version: c_int) -> Result<()> {
    check(ffi::NT_Init(version))
}

pub fn done() -> Result<()> {
    check(ffi::NT_Done())
}

/// Renders the message `NT_ExplainError` would write for `status`.
pub fn explain(status: NT_STATUS) -> String {
    let mut buf = [0u8; EXPLAIN_BUFFER_SIZE];
    let n = explain_into(status, &mut buf);
    String::from_utf8_lossy(&buf[..n]).into_owned()
}

fn c_name(name: &str) -> Result<CString> {
    CString::new(name).map_err(|_| Error::InvalidParameter("stream name contains nul"))
}

fn close_logged(what: &str, status: NT_STATUS) {
    if let Err(e) = check(status) {
        warn!("close {} failed: {}", what, e);
    }
}

/// A packet descriptor handed out by `NetRx::get`.
#[derive(Debug)]
pub struct NetBuf(NtNetBuf_t);

impl NetBuf {
    /// Wraps a descriptor obtained outside `NetRx::get`, e.g. from a C caller.
    pub fn from_raw(buf: NtNetBuf_t) -> Self {
        Self(buf)
    }

    pub fn as_raw(&self) -> NtNetBuf_t {
        self.0
    }

    pub fn timestamp(&self) -> c_int {
        ffi::NT_NET_GET_PKT_TIMESTAMP(self.0)
    }

    pub fn timestamp_type(&self) -> Result<TimestampType> {
        let raw = ffi::NT_NET_GET_PKT_TIMESTAMP_TYPE(self.0);
        TimestampType::try_from(raw).map_err(|e| Error::UnknownStatus(e.number))
    }

    pub fn l2_ptr(&self) -> *mut c_void {
        ffi::NT_NET_GET_PKT_L2_PTR(self.0)
    }

    pub fn wire_length(&self) -> c_int {
        ffi::NT_NET_GET_PKT_WIRE_LENGTH(self.0)
    }
}

pub struct NetRx {
    handle: NtNetStreamRx_t,
}

impl NetRx {
    pub fn open(name: &str, interface: c_int, stream_id: c_int, hba: c_int) -> Result<Self> {
        let name = c_name(name)?;
        let mut handle: NtNetStreamRx_t = ptr::null_mut();
        check(unsafe { ffi::NT_NetRxOpen(&mut handle, name.as_ptr(), interface, stream_id, hba) })?;
        Ok(Self { handle })
    }

    /// Waits up to `timeout` milliseconds for a packet. The stand-in never
    /// has one, so this fails with `TryAgain` or `Timeout`.
    pub fn get(&mut self, timeout: c_int) -> Result<NetBuf> {
        let mut buf: NtNetBuf_t = ptr::null_mut();
        check(ffi::NT_NetRxGet(self.handle, &mut buf, timeout))?;
        Ok(NetBuf(buf))
    }

    pub fn release(&mut self, buf: NetBuf) -> Result<()> {
        check(ffi::NT_NetRxRelease(self.handle, buf.0))
    }

    pub fn dropped_packets(&mut self) -> Result<u64> {
        let mut cmd = NtNetRxCmd_t::stream_drop();
        check(unsafe { ffi::NT_NetRxRead(self.handle, &mut cmd) })?;
        // SAFETY: the stream drop member was selected and written above
        Ok(unsafe { cmd.u.stream_drop.pkts_dropped })
    }
}

impl Drop for NetRx {
    fn drop(&mut self) {
        close_logged("rx stream", ffi::NT_NetRxClose(self.handle));
    }
}

pub struct InfoStream {
    handle: NtInfoStream_t,
}

impl InfoStream {
    pub fn open(name: &str) -> Result<Self> {
        let name = c_name(name)?;
        let mut handle: NtInfoStream_t = ptr::null_mut();
        check(unsafe { ffi::NT_InfoOpen(&mut handle, name.as_ptr()) })?;
        Ok(Self { handle })
    }

    pub fn stream_count(&mut self) -> Result<u32> {
        let mut info = NtInfo_t::read_stream();
        check(unsafe { ffi::NT_InfoRead(self.handle, &mut info) })?;
        Ok(info.stream_count())
    }
}

impl Drop for InfoStream {
    fn drop(&mut self) {
        close_logged("info stream", ffi::NT_InfoClose(self.handle));
    }
}

pub struct StatStream {
    handle: NtStatStream_t,
}

impl StatStream {
    pub fn open(name: &str) -> Result<Self> {
        let name = c_name(name)?;
        let mut handle: NtStatStream_t = ptr::null_mut();
        check(unsafe { ffi::NT_StatOpen(&mut handle, name.as_ptr()) })?;
        Ok(Self { handle })
    }

    // boxed, the record is over a kilobyte
    pub fn read(&mut self) -> Result<Box<NtStatistics_t>> {
        let mut stat = Box::new(NtStatistics_t::usage_data_v0());
        check(unsafe { ffi::NT_StatRead(self.handle, &mut *stat) })?;
        Ok(stat)
    }
}

impl Drop for StatStream {
    fn drop(&mut self) {
        close_logged("stat stream", ffi::NT_StatClose(self.handle));
    }
}

pub struct ConfigStream {
    handle: NtConfigStream_t,
}

impl ConfigStream {
    pub fn open(name: &str) -> Result<Self> {
        let name = c_name(name)?;
        let mut handle: NtConfigStream_t = ptr::null_mut();
        check(unsafe { ffi::NT_ConfigOpen(&mut handle, name.as_ptr()) })?;
        Ok(Self { handle })
    }

    /// Submits one NTPL command and returns the filter id it was given.
    pub fn ntpl(&mut self, text: &str, mode: c_int) -> Result<i32> {
        let text =
            CString::new(text).map_err(|_| Error::InvalidParameter("ntpl text contains nul"))?;
        let mut info = NtNtplInfo_t::default();
        check(unsafe { ffi::NT_NTPL(self.handle, text.as_ptr(), &mut info, mode) })?;
        Ok(info.ntpl_id)
    }
}

impl Drop for ConfigStream {
    fn drop(&mut self) {
        close_logged("config stream", ffi::NT_ConfigClose(self.handle));
    }
}
