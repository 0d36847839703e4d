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

use ntapi::consts::*;
use ntapi::stream::{self, ConfigStream, InfoStream, NetRx, StatStream};
use ntapi::Error;

#[test]
fn typed_capture_loop() {
    stream::init(NTAPI_VERSION).unwrap();

    let mut rx = NetRx::open("typed", NT_NET_INTERFACE_PACKET, 0, 0).unwrap();
    for _ in 0..10 {
        let err = rx.get(1000).unwrap_err();
        assert!(matches!(err, Error::TryAgain | Error::Timeout), "got {}", err);
    }
    assert_eq!(rx.dropped_packets().unwrap(), 0);

    let mut info = InfoStream::open("info").unwrap();
    assert_eq!(info.stream_count().unwrap(), 1);

    let mut stat = StatStream::open("stat").unwrap();
    let first = stat.read().unwrap();
    let second = stat.read().unwrap();
    assert_eq!(first.usage(), second.usage());
    assert_eq!(first.usage().data.hb[0].numa_node, 0);

    let mut cfg = ConfigStream::open("cfg").unwrap();
    for line in ["Delete=All", "Assign[StreamId=0]=All", "garbage ]]["] {
        assert_eq!(cfg.ntpl(line, NT_NTPL_PARSER_VALIDATE_NORMAL).unwrap(), 1);
    }

    stream::done().unwrap();
}

#[test]
fn explain_matches_status() {
    assert_eq!(stream::explain(NT_STATUS_TIMEOUT), "Napatech stub error -2");
    assert_eq!(
        stream::explain(Error::TryAgain.status()),
        "Napatech stub error -3"
    );
}
