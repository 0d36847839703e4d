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

//! `#[repr(C)]` mirrors of the records declared in `include/nt.h`.
//!
//! The C header declares most nested members as anonymous structs and
//! unions; each gets a named Rust type here with the same layout.

#![allow(non_camel_case_types)]

use std::mem;

use libc::{c_char, c_int, c_void};

use crate::consts::{ERR_BUFFER_COUNT, ERR_BUFFER_SIZE, MAX_HOST_BUFFERS};

pub type NtNetBuf_t = *mut c_void;
pub type NtNetStreamRx_t = *mut c_void;
pub type NtNetStreamTx_t = *mut c_void;
pub type NtFlowStream_t = *mut c_void;
pub type NtNetRx_t = *mut c_void;
pub type NtNetTx_t = *mut c_void;
pub type NtNetInterface_t = *mut c_void;
pub type NtNetStreamEvent_t = *mut c_void;
pub type NtStatStream_t = *mut c_void;
pub type NtInfoStream_t = *mut c_void;
pub type NtConfigStream_t = *mut c_void;
pub type NT_STATUS = c_int;

pub type NtNetRxCmd_p = *mut NtNetRxCmd_t;

// Zeroed memory is a valid value for every record below: they hold only
// integers, byte arrays and unions of those.
macro_rules! impl_zeroed_default {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Default for $t {
                fn default() -> Self {
                    unsafe { mem::zeroed() }
                }
            }
        )+
    };
}

/// `errorData` member shared by `NtInfo_t` and `NtNtplInfo_t`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NtErrorData {
    pub err_buffer: [[c_char; ERR_BUFFER_SIZE]; ERR_BUFFER_COUNT],
}

impl NtErrorData {
    pub fn clear(&mut self) {
        for buf in self.err_buffer.iter_mut() {
            buf.fill(0);
        }
    }

    pub fn is_clear(&self) -> bool {
        self.err_buffer.iter().flatten().all(|c| *c == 0)
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtNetRxStreamDrop {
    pub pkts_dropped: u64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union NtNetRxCmdData {
    pub stream_drop: NtNetRxStreamDrop,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct NtNetRxCmd_t {
    pub cmd: c_int,
    pub u: NtNetRxCmdData,
}

impl NtNetRxCmd_t {
    pub fn stream_drop() -> Self {
        Self {
            cmd: crate::consts::NT_NETRX_READ_CMD_STREAM_DROP,
            ..Default::default()
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtInfoStreamData {
    pub count: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtInfoStreamRecord {
    pub data: NtInfoStreamData,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union NtInfoData {
    pub stream: NtInfoStreamRecord,
    pub error_data: NtErrorData,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct NtInfo_t {
    pub cmd: c_int,
    pub u: NtInfoData,
}

impl NtInfo_t {
    pub fn read_stream() -> Self {
        Self {
            cmd: crate::consts::NT_INFO_CMD_READ_STREAM,
            ..Default::default()
        }
    }

    pub fn stream_count(&self) -> u32 {
        unsafe { self.u.stream.data.count }
    }

    pub fn error_data(&self) -> &NtErrorData {
        unsafe { &self.u.error_data }
    }
}

/// `onboardBuffering` of a host buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtOnboardBuffering {
    pub used: u64,
    pub size: u64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtFrameCounters {
    pub frames: u64,
    pub bytes: u64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtHostBufferStat {
    pub rx: NtFrameCounters,
    pub drop: NtFrameCounters,
}

/// One `hb[]` entry of the usage data.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtHostBufferUsage {
    pub onboard_buffering: NtOnboardBuffering,
    pub en_queued_adapter: u64,
    pub de_queued: u64,
    pub en_queued: u64,
    pub numa_node: u32,
    pub stat: NtHostBufferStat,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtUsageData {
    pub num_host_buffer_used: u32,
    pub hb: [NtHostBufferUsage; MAX_HOST_BUFFERS],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtUsageDataV0 {
    pub streamid: u8,
    pub data: NtUsageData,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NtStatQueryV2 {
    pub clear: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union NtStatisticsData {
    pub usage_data_v0: NtUsageDataV0,
    pub query_v2: NtStatQueryV2,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct NtStatistics_t {
    pub cmd: c_int,
    pub u: NtStatisticsData,
}

impl NtStatistics_t {
    pub fn usage_data_v0() -> Self {
        Self {
            cmd: crate::consts::NT_STATISTICS_READ_CMD_USAGE_DATA_V0,
            ..Default::default()
        }
    }

    /// Views the usage-data member. Every bit pattern is a valid
    /// `NtUsageDataV0`, so this is sound whichever member was written last.
    pub fn usage(&self) -> &NtUsageDataV0 {
        unsafe { &self.u.usage_data_v0 }
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union NtNtplInfoData {
    pub error_data: NtErrorData,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct NtNtplInfo_t {
    pub ntpl_id: c_int,
    pub u: NtNtplInfoData,
}

impl NtNtplInfo_t {
    pub fn error_data(&self) -> &NtErrorData {
        unsafe { &self.u.error_data }
    }
}

impl_zeroed_default!(
    NtErrorData,
    NtNetRxCmdData,
    NtNetRxCmd_t,
    NtInfoData,
    NtInfo_t,
    NtStatisticsData,
    NtStatistics_t,
    NtNtplInfoData,
    NtNtplInfo_t,
);
