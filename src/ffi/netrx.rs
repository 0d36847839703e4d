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
use log::{debug, trace};

use crate::config;
use crate::consts::NT_SUCCESS;
use crate::types::{NtNetBuf_t, NtNetRxCmd_p, NtNetRxStreamDrop, NtNetStreamRx_t, NT_STATUS};
use crate::utils::guard::ffi_guard;

/// The capture source is always empty: `net_buf` is never written.
#[no_mangle]
pub extern "C" fn NT_NetRxGet(
    _h_stream: NtNetStreamRx_t,
    _net_buf: *mut NtNetBuf_t,
    timeout: c_int,
) -> NT_STATUS {
    ffi_guard! {
        let status = config::global().rx_get_status.status();
        trace!("NT_NetRxGet timeout={} -> {}", timeout, status);
        status
    }
}

#[no_mangle]
pub extern "C" fn NT_NetRxRelease(_h_stream: NtNetStreamRx_t, _net_buf: NtNetBuf_t) -> NT_STATUS {
    trace!("NT_NetRxRelease");
    NT_SUCCESS
}

/// Reports zero dropped packets whatever command was asked for.
#[no_mangle]
pub unsafe extern "C" fn NT_NetRxRead(_h_stream: NtNetStreamRx_t, cmd: NtNetRxCmd_p) -> NT_STATUS {
    ffi_guard! {
        if let Some(cmd) = cmd.as_mut() {
            debug!("NT_NetRxRead cmd={}", cmd.cmd);
            cmd.u.stream_drop = NtNetRxStreamDrop { pkts_dropped: 0 };
        }
        NT_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;
    use crate::consts::{NT_NETRX_READ_CMD_STREAM_DROP, NT_STATUS_TIMEOUT, NT_STATUS_TRYAGAIN};
    use crate::ffi::placeholder_handle;
    use crate::types::NtNetRxCmd_t;

    #[test]
    fn get_never_yields_a_packet() {
        let sentinel = 0x1234usize as NtNetBuf_t;
        let mut buf = sentinel;
        let expected = config::global().rx_get_status.status();
        assert!(expected == NT_STATUS_TRYAGAIN || expected == NT_STATUS_TIMEOUT);
        for timeout in [-1, 0, 1000] {
            assert_eq!(NT_NetRxGet(placeholder_handle(), &mut buf, timeout), expected);
        }
        assert_eq!(buf, sentinel);
        assert_eq!(NT_NetRxRelease(placeholder_handle(), buf), NT_SUCCESS);
    }

    #[test]
    fn get_from_many_threads() {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let mut buf: NtNetBuf_t = ptr::null_mut();
                    NT_NetRxGet(ptr::null_mut(), &mut buf, 0)
                })
            })
            .collect();
        let expected = config::global().rx_get_status.status();
        for w in workers {
            assert_eq!(w.join().unwrap(), expected);
        }
    }

    #[test]
    fn read_zeroes_drop_counter() {
        let mut cmd = NtNetRxCmd_t::stream_drop();
        cmd.u.stream_drop = NtNetRxStreamDrop { pkts_dropped: 99 };
        assert_eq!(unsafe { NT_NetRxRead(placeholder_handle(), &mut cmd) }, NT_SUCCESS);
        assert_eq!(cmd.cmd, NT_NETRX_READ_CMD_STREAM_DROP);
        assert_eq!(unsafe { cmd.u.stream_drop.pkts_dropped }, 0);

        assert_eq!(unsafe { NT_NetRxRead(ptr::null_mut(), ptr::null_mut()) }, NT_SUCCESS);
    }
}
