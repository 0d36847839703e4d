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

//! Layout probe compiled from `include/nt.h`, see `c/nt_probe.c`.

use libc::c_int;

pub mod probe {
    use super::c_int;

    extern "C" {
        pub fn probe_handle_size() -> usize;
        pub fn probe_status_size() -> usize;

        pub fn probe_netrx_cmd_size() -> usize;
        pub fn probe_netrx_cmd_align() -> usize;
        pub fn probe_netrx_cmd_u_offset() -> usize;
        pub fn probe_netrx_cmd_pkts_dropped_offset() -> usize;

        pub fn probe_info_size() -> usize;
        pub fn probe_info_align() -> usize;
        pub fn probe_info_count_offset() -> usize;
        pub fn probe_info_err_buffer_offset() -> usize;
        pub fn probe_info_err_buffer_2_offset() -> usize;

        pub fn probe_stat_size() -> usize;
        pub fn probe_stat_align() -> usize;
        pub fn probe_stat_u_offset() -> usize;
        pub fn probe_stat_streamid_offset() -> usize;
        pub fn probe_stat_num_hb_offset() -> usize;
        pub fn probe_stat_hb_offset() -> usize;
        pub fn probe_stat_hb1_offset() -> usize;
        pub fn probe_stat_hb_size() -> usize;
        pub fn probe_stat_hb_onboard_size_offset() -> usize;
        pub fn probe_stat_hb_en_queued_offset() -> usize;
        pub fn probe_stat_hb_numa_node_offset() -> usize;
        pub fn probe_stat_hb_stat_offset() -> usize;
        pub fn probe_stat_hb_drop_bytes_offset() -> usize;
        pub fn probe_stat_clear_offset() -> usize;

        pub fn probe_ntpl_info_size() -> usize;
        pub fn probe_ntpl_info_align() -> usize;
        pub fn probe_ntpl_info_err_buffer_offset() -> usize;

        pub static PROBE_NT_SUCCESS: c_int;
        pub static PROBE_NT_ERROR_INVALID_PARAMETER: c_int;
        pub static PROBE_NT_STATUS_TIMEOUT: c_int;
        pub static PROBE_NT_STATUS_TRYAGAIN: c_int;
        pub static PROBE_NTAPI_VERSION: c_int;
        pub static PROBE_NT_NET_INTERFACE_PACKET: c_int;
        pub static PROBE_NT_TIMESTAMP_TYPE_NATIVE_UNIX: c_int;
        pub static PROBE_NT_TIMESTAMP_TYPE_PCAP: c_int;
        pub static PROBE_NT_TIMESTAMP_TYPE_PCAP_NANOTIME: c_int;
        pub static PROBE_NT_TIMESTAMP_TYPE_NATIVE_NDIS: c_int;
        pub static PROBE_NT_NETRX_READ_CMD_STREAM_DROP: c_int;
        pub static PROBE_NT_INFO_CMD_READ_STREAM: c_int;
        pub static PROBE_NT_STATISTICS_READ_CMD_USAGE_DATA_V0: c_int;
        pub static PROBE_NT_STATISTICS_READ_CMD_QUERY_V2: c_int;
        pub static PROBE_NT_NTPL_PARSER_VALIDATE_NORMAL: c_int;
    }
}
