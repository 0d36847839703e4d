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

use log::debug;

use crate::consts::{
    NT_INFO_CMD_READ_STREAM, NT_STATISTICS_READ_CMD_USAGE_DATA_V0, NT_SUCCESS,
    STUB_HOST_BUFFERS_USED, STUB_ONBOARD_BUFFER_SIZE, STUB_STREAM_COUNT,
};
use crate::types::{
    NtErrorData, NtHostBufferUsage, NtInfoStreamData, NtInfoStreamRecord, NtInfoStream_t,
    NtInfo_t, NtOnboardBuffering, NtStatStream_t, NtStatistics_t, NT_STATUS,
};
use crate::utils::guard::ffi_guard;

// `stream.data.count` overlays the first bytes of `errorData.errBuffer[0]`,
// so the buffers are cleared first and the count written over them.
fn fill_stream_info(info: &mut NtInfo_t) {
    info.cmd = NT_INFO_CMD_READ_STREAM;
    info.u.error_data = NtErrorData::default();
    info.u.stream = NtInfoStreamRecord {
        data: NtInfoStreamData {
            count: STUB_STREAM_COUNT,
        },
    };
}

// Only host buffer 0 is written; entries 1.. keep whatever the caller had.
fn fill_usage(stat: &mut NtStatistics_t) {
    stat.cmd = NT_STATISTICS_READ_CMD_USAGE_DATA_V0;
    // SAFETY: all members are plain integers, any bit pattern is valid
    let usage = unsafe { &mut stat.u.usage_data_v0 };
    usage.streamid = 0;
    usage.data.num_host_buffer_used = STUB_HOST_BUFFERS_USED;
    usage.data.hb[0] = NtHostBufferUsage {
        onboard_buffering: NtOnboardBuffering {
            used: 0,
            size: STUB_ONBOARD_BUFFER_SIZE,
        },
        ..Default::default()
    };
}

#[no_mangle]
pub unsafe extern "C" fn NT_InfoRead(_h_stream: NtInfoStream_t, info: *mut NtInfo_t) -> NT_STATUS {
    ffi_guard! {
        if let Some(info) = info.as_mut() {
            debug!("NT_InfoRead cmd={}", info.cmd);
            fill_stream_info(info);
        }
        NT_SUCCESS
    }
}

/// Query parameters such as `query_v2.clear` are ignored.
#[no_mangle]
pub unsafe extern "C" fn NT_StatRead(
    _h_stream: NtStatStream_t,
    stat: *mut NtStatistics_t,
) -> NT_STATUS {
    ffi_guard! {
        if let Some(stat) = stat.as_mut() {
            debug!("NT_StatRead cmd={}", stat.cmd);
            fill_usage(stat);
        }
        NT_SUCCESS
    }
}
